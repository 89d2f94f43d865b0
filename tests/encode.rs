mod tests {
    use ws281x_strip::encode::{
        BIT_0_HIGH_NS, BIT_1_HIGH_NS, BIT_PERIOD_NS, DutyCycleEncoder, Encoder, PulseItem,
        PulseTrainEncoder, RESET_LATCH, RESET_SLOTS, duty_sequence_len, pulse_sequence_len,
    };

    const RMT_HZ: u32 = 40_000_000;
    const TIM_HZ: u32 = 72_000_000;

    #[test]
    fn test_protocol_constants() {
        assert_eq!(BIT_PERIOD_NS, 1_250);
        assert_eq!(BIT_0_HIGH_NS, 400);
        assert_eq!(BIT_1_HIGH_NS, 800);
        assert_eq!(RESET_LATCH.as_micros(), 50);
    }

    #[test]
    fn test_pulse_timing_at_40_mhz() {
        let encoder = PulseTrainEncoder::new(RMT_HZ).unwrap();
        assert_eq!(
            encoder.zero(),
            PulseItem {
                high_ticks: 16,
                low_ticks: 34
            }
        );
        assert_eq!(
            encoder.one(),
            PulseItem {
                high_ticks: 32,
                low_ticks: 18
            }
        );
    }

    #[test]
    fn test_pulse_sequence_length() {
        let encoder = PulseTrainEncoder::new(RMT_HZ).unwrap();
        let pixels = [[0x55, 0xAA, 0x00]; 3];
        let mut out = [PulseItem::default(); pulse_sequence_len(3)];
        assert_eq!(encoder.encode(&pixels, &mut out), 72);
        assert_eq!(pulse_sequence_len(3), 72);
    }

    #[test]
    fn test_pulse_bit_order_msb_first() {
        let encoder = PulseTrainEncoder::new(RMT_HZ).unwrap();
        let pixels = [[0b1000_0000, 0, 0]];
        let mut out = [PulseItem::default(); pulse_sequence_len(1)];
        encoder.encode(&pixels, &mut out);

        assert_eq!(out[0], encoder.one());
        assert_eq!(out[1], encoder.zero());
        for item in &out[1..] {
            assert_eq!(*item, encoder.zero());
        }
    }

    #[test]
    fn test_pulse_byte_storage_order() {
        let encoder = PulseTrainEncoder::new(RMT_HZ).unwrap();
        let pixels = [[0x00, 0xFF, 0x00]];
        let mut out = [PulseItem::default(); pulse_sequence_len(1)];
        encoder.encode(&pixels, &mut out);

        for item in &out[..8] {
            assert_eq!(*item, encoder.zero());
        }
        for item in &out[8..16] {
            assert_eq!(*item, encoder.one());
        }
        for item in &out[16..24] {
            assert_eq!(*item, encoder.zero());
        }
    }

    #[test]
    fn test_duty_levels_at_72_mhz() {
        let encoder = DutyCycleEncoder::new(TIM_HZ).unwrap();
        assert_eq!(encoder.low_duty(), 28);
        assert_eq!(encoder.high_duty(), 57);
        assert_eq!(encoder.auto_reload(), 89);
    }

    #[test]
    fn test_duty_sequence_has_reset_tail() {
        let encoder = DutyCycleEncoder::new(TIM_HZ).unwrap();
        let pixels = [[0xFF, 0x00, 0xFF]; 2];
        let mut out = [0u16; duty_sequence_len(2)];
        assert_eq!(encoder.encode(&pixels, &mut out), 48 + RESET_SLOTS);

        for sample in &out[..48] {
            assert!(*sample == 28 || *sample == 57);
        }
        for sample in &out[48..] {
            assert_eq!(*sample, 0);
        }
    }

    #[test]
    fn test_duty_bit_order_msb_first() {
        let encoder = DutyCycleEncoder::new(TIM_HZ).unwrap();
        let pixels = [[0b1000_0001, 0, 0]];
        let mut out = [0u16; duty_sequence_len(1)];
        encoder.encode(&pixels, &mut out);

        assert_eq!(out[0], 57);
        assert_eq!(out[1..7], [28u16; 6]);
        assert_eq!(out[7], 57);
    }

    #[test]
    fn test_clock_too_slow() {
        // 1 MHz cannot resolve a 400 ns pulse.
        assert!(PulseTrainEncoder::new(1_000_000).is_err());
        assert!(DutyCycleEncoder::new(1_000_000).is_err());
        assert!(PulseTrainEncoder::new(2_500_000).is_ok());
    }
}
