//! Integration tests driving the whole exchange against a local server.

mod fetch;
