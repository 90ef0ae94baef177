pub mod components;
pub mod pages;
pub mod shell;
pub mod text;
pub mod theme;
