/// Format an integer Rupiah amount with dot separators: Rp 1.520.000
pub fn rupiah(val: u64) -> String {
    let digits = val.to_string();
    let mut with_dots = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_dots.push('.');
        }
        with_dots.push(c);
    }
    let with_dots: String = with_dots.chars().rev().collect();
    format!("Rp {with_dots}")
}
