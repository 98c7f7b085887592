mod auth;
mod contacts;
mod corrupted_cards;
mod helpers;
