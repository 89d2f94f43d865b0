mod tests {
    use ws281x_strip::color::Rgb;
    use ws281x_strip::gamma::{correct, correct8};

    #[test]
    fn test_endpoints() {
        assert_eq!(correct8(0), 0);
        assert_eq!(correct8(255), 255);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        for value in 0..255u8 {
            assert!(
                correct8(value) <= correct8(value + 1),
                "gamma decreases between {} and {}",
                value,
                value + 1
            );
        }
    }

    #[test]
    fn test_spot_values() {
        assert_eq!(correct8(64), 11);
        assert_eq!(correct8(128), 55);
        assert_eq!(correct8(200), 148);
    }

    #[test]
    fn test_correct_applies_per_channel() {
        let corrected = correct(Rgb {
            r: 255,
            g: 0,
            b: 128,
        });
        assert_eq!(
            corrected,
            Rgb {
                r: 255,
                g: 0,
                b: 55
            }
        );
    }
}
