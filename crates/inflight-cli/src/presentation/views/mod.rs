mod dialect;
mod example;
mod scan;
