//! End-to-end tests over the HTTP router and a real library tree

mod e2e;
mod fixtures;
