pub mod client_rect;
