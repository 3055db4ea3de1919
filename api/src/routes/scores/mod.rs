mod get_top;
pub use get_top::get_top;

mod post_new;
pub use post_new::post_new;
