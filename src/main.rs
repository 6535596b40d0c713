//! codegen's main application entry point.
//! Parses arguments, sets up logging and runs the generation pipeline.

use codegen::{
    cli::get_args,
    error::default_error_handler,
    logger::init_logger,
    pipeline::generate,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let ctx = args.into_context();
    if let Err(err) = generate(&ctx) {
        default_error_handler(err);
    }
}
