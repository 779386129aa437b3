//! Embedded word list
//!
//! The default dictionary, compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
