mod tests {
    use myrtio_neopixel::StripType;

    #[test]
    fn test_strip_type_raw_values() {
        assert_eq!(StripType::Rgb.raw(), 0x0010_0800);
        assert_eq!(StripType::Grb.raw(), 0x0008_1000);
        assert_eq!(StripType::Grbw.raw(), 0x1808_1000);
    }

    #[test]
    fn test_strip_type_from_raw() {
        assert_eq!(StripType::from_raw(0x0000_0810), Some(StripType::Bgr));
        assert_eq!(StripType::from_raw(0x1800_1008), Some(StripType::Brgw));
        assert_eq!(StripType::from_raw(0x1234), None);
    }

    #[test]
    fn test_strip_type_parse_and_name() {
        assert_eq!(StripType::parse_from_str("gbr"), Some(StripType::Gbr));
        assert_eq!(StripType::parse_from_str("rbgw"), Some(StripType::Rbgw));
        assert_eq!(StripType::parse_from_str("purple"), None);
        assert_eq!(StripType::Gbrw.as_str(), "gbrw");
    }

    #[test]
    fn test_strip_type_aliases() {
        assert_eq!(StripType::WS2812, StripType::Grb);
        assert_eq!(StripType::SK6812W, StripType::Grbw);
        assert_eq!(StripType::default(), StripType::Rgb);
    }

    #[test]
    fn test_strip_type_white() {
        assert!(StripType::Rgbw.has_white());
        assert!(StripType::SK6812W.has_white());
        assert!(!StripType::Rgb.has_white());
        assert!(!StripType::WS2812.has_white());
    }
}
