#[cfg(test)]
mod reporting;
