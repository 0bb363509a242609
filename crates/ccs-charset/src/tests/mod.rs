mod inheritance;
mod utils;
