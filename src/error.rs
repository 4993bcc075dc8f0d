//! Crate error type.
//!
//! Every failure is fatal to a render run: configuration is checked once when the
//! [`Renderer`](crate::render::Renderer) is built, and output errors carry the path they
//! were raised for.
#![allow(deprecated)]

use error_chain::error_chain;

error_chain! {
  foreign_links {
    IoError(std::io::Error);
    ImageError(image::ImageError);
  }

  errors {
    InvalidConfig(reason: String) {
      description("invalid configuration")
      display("invalid configuration: {}", reason)
    }
    OutputFile(path: String) {
      description("unable to create output file")
      display("unable to create output file '{}'", path)
    }
    Encode(path: String) {
      description("unable to encode image")
      display("unable to encode png into '{}'", path)
    }
  }
}

/// Print the error chain (and a backtrace, if one was captured) to stderr.
/// The same text is returned, one `└> index - message` line per link.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .iter()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));

  if let Some(backtrace) = error.backtrace() {
    msg.push_str(&format!("\n{:?}", backtrace));
  }
  eprintln!("{}", msg);
  msg
}
