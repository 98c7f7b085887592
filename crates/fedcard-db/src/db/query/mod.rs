pub mod addressbook;
pub mod card;
pub mod etag;
pub mod user;
