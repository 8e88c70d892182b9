pub mod text_switch;
