//! Unit tests for three-axis sampling

use crate::common::{BusFault, MockBus};
use leveler::drivers::adxl345::{reg, Adxl345};
use leveler::AxisSample;

#[test]
fn test_sample_reads_six_registers_in_order() {
    let mut bus = MockBus::new();
    let mut sensor = Adxl345::new(bus.clone());
    bus.clear_operations();

    sensor.sample_axes(&mut bus).unwrap();

    let expected: Vec<u8> = (reg::DATAX0..=reg::DATAZ1).map(|a| a | 0x80).collect();
    assert_eq!(bus.addresses(), expected);
}

#[test]
fn test_sample_assembles_signed_values() {
    let mut bus = MockBus::new();
    bus.set_sample(AxisSample::new(500, -170, i16::MIN));
    let mut sensor = Adxl345::new(bus.clone());

    let sample = sensor.sample_axes(&mut bus).unwrap();

    assert_eq!(sample, AxisSample::new(500, -170, i16::MIN));
}

#[test]
fn test_sample_uses_low_byte_first() {
    let mut bus = MockBus::new();
    bus.set_register(reg::DATAX0, 0x34);
    bus.set_register(reg::DATAX1, 0x12);
    bus.set_register(reg::DATAY0, 0xFE);
    bus.set_register(reg::DATAY1, 0xFF);
    let mut sensor = Adxl345::new(bus.clone());

    let sample = sensor.sample_axes(&mut bus).unwrap();

    assert_eq!(sample.x, 0x1234);
    assert_eq!(sample.y, -2);
    assert_eq!(sample.z, 0);
}

#[test]
fn test_sample_stops_at_first_bus_error() {
    let mut bus = MockBus::new();
    let mut sensor = Adxl345::new(bus.clone());
    bus.clear_operations();
    // Transfer 5 is the data phase of the third read (DATAY0).
    bus.fail_transfer(5);

    assert_eq!(sensor.sample_axes(&mut bus), Err(BusFault));
    assert_eq!(
        bus.addresses(),
        vec![0x80 | reg::DATAX0, 0x80 | reg::DATAX1, 0x80 | reg::DATAY0]
    );
    assert!(!bus.is_selected());
}
