//! HTTP request handlers
//!
//! This module organizes all handlers into logical groups:
//! - `api` - Health check endpoint
//! - `pages` - Server-rendered practice pages and their stylesheet
//! - `practice` - Practice JSON API
//! - `speak` - Play.ht text-to-speech proxy

pub mod api;
pub mod pages;
pub mod practice;
pub mod speak;
