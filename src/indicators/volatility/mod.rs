pub mod realized;
