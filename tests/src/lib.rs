//! Integration tests for the `evento` workspace.

#[cfg(test)]
mod taxid;
