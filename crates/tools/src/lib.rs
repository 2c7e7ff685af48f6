pub mod contact_check;
pub mod replay;
pub mod svg;
