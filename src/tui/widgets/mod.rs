pub mod dhikr;
pub mod dua;
pub mod goal;
pub mod header;
pub mod notes;
pub mod prayers;
pub mod statusbar;
pub mod topic;
