mod error_shape;
mod health;
