mod hello_text;
mod helpers;
