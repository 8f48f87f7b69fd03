pub mod corner_badge;
