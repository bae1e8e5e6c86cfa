//! Entity <-> model mappers

mod game;
mod genre;
mod maker;
mod user;
