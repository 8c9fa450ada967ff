// Regular expressions used while transcribing inline commands

#[macro_use]
mod cache;
