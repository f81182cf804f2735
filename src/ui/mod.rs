pub mod animation;
pub mod detail;
pub mod filters;
pub mod highlight;
pub mod messages;
pub mod mvi;
pub mod palette;
pub mod recursion;
pub mod settings;
pub mod view;
