mod harness;
mod security;
