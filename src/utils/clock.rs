use js_sys::Date;

/// Hora local atual como "HH:MM" (24h, zero à esquerda), o carimbo usado
/// em eventos recém-adicionados.
pub fn now_hhmm() -> String {
    let now = Date::new_0();
    format_hhmm(now.get_hours(), now.get_minutes())
}

fn format_hhmm(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_hhmm(9, 5), "09:05");
        assert_eq!(format_hhmm(0, 0), "00:00");
        assert_eq!(format_hhmm(23, 59), "23:59");
    }
}
