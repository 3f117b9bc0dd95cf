//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, calling the handler functions directly with extractors and
//! verifying status codes, success envelopes, and error handling.

mod capture;
mod constellation;
mod constellation_item;
mod favorite;
mod food;
mod logbook;
mod recognition;
mod user;

use foodex_test_utils::prelude::*;

use crate::TestSetupExt;
