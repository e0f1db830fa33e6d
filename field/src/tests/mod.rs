#[cfg(test)]
mod test_field;
