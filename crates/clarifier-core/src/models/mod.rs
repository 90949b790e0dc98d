pub mod code_group;
pub mod cpt;
pub mod diet;
pub mod domain;
pub mod frequency;
pub mod request;
pub mod selection;
