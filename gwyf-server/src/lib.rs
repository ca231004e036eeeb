//! RER next-trains proxy.
//!
//! Turns `?line=&direction=&station=` into a request against the RATP WAP
//! schedule page, scrapes the upcoming trains out of the returned HTML and
//! serves them as JSON.

pub mod config;
pub mod domain;
pub mod ratp;
pub mod web;
