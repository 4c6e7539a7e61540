use super::SystemSource;

pub fn resolution(src: &dyn SystemSource) -> String {
    let (cols, rows) = src.terminal_size();
    format!("Terminal: {cols} cols x {rows} rows")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::fake::FakeSource;

    #[test]
    fn test_resolution() {
        let src = FakeSource::new().with_size(132, 43);
        assert_eq!(resolution(&src), "Terminal: 132 cols x 43 rows");
    }
}
