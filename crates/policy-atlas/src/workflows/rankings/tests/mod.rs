mod accumulator;
mod common;
mod routing;
