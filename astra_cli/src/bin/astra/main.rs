//! Main entry point for AstraCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use astra_cli::application::APP;

/// Boot AstraCli
fn main() {
    abscissa_core::boot(&APP);
}
