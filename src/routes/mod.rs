mod hello;
mod hello_show;
mod hello_text;

pub use hello::{hello, post_hello};
pub use hello_show::show_name;
pub use hello_text::{hello_text, post_hello_text};
