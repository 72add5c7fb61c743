//! Mock SPI bus that models the ADXL345 register file.

use leveler::hw::{ByteBus, DutyOutput, IndicatorLine, SelectLine};
use leveler::AxisSample;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Records operations performed on the mock bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Deselect,
    /// One byte exchange: what went out, what came back.
    Transfer { mosi: u8, miso: u8 },
}

/// Simulated bus failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug)]
struct MockState {
    registers: [u8; 0x40],
    selected: bool,
    /// Address latched by the first byte of the current transaction.
    address: Option<u8>,
    operations: Vec<Operation>,
    /// Fail the transfer with this index (counted from zero over the whole run).
    fail_at: Option<usize>,
    transfers: usize,
    /// Samples loaded into the data registers one per completed Z-high read.
    samples: VecDeque<AxisSample>,
}

impl MockState {
    fn load(&mut self, s: AxisSample) {
        for (base, v) in [(0x32, s.x), (0x34, s.y), (0x36, s.z)] {
            let [lo, hi] = v.to_le_bytes();
            self.registers[base] = lo;
            self.registers[base + 1] = hi;
        }
    }
}

/// Cloneable handle: one clone goes to the driver as the bus, another as the chip select, and the
/// test keeps one to inspect state.
#[derive(Clone)]
pub struct MockBus {
    state: Rc<RefCell<MockState>>,
}

impl MockBus {
    pub fn new() -> Self {
        let mut registers = [0u8; 0x40];
        registers[0x00] = 0xE5;
        Self {
            state: Rc::new(RefCell::new(MockState {
                registers,
                selected: false,
                address: None,
                operations: Vec::new(),
                fail_at: None,
                transfers: 0,
                samples: VecDeque::new(),
            })),
        }
    }

    pub fn register(&self, addr: u8) -> u8 {
        self.state.borrow().registers[addr as usize]
    }

    pub fn set_register(&self, addr: u8, value: u8) {
        self.state.borrow_mut().registers[addr as usize] = value;
    }

    /// Put `sample` in the data registers now.
    pub fn set_sample(&self, sample: AxisSample) {
        self.state.borrow_mut().load(sample);
    }

    /// Queue samples; each is loaded after the previous one's last byte (DATAZ1) is read.
    pub fn queue_samples(&self, samples: impl IntoIterator<Item = AxisSample>) {
        let mut st = self.state.borrow_mut();
        st.samples.extend(samples);
        let first = st.samples.pop_front();
        if let Some(first) = first {
            st.load(first);
        }
    }

    pub fn fail_transfer(&self, index: usize) {
        self.state.borrow_mut().fail_at = Some(index);
    }

    pub fn is_selected(&self) -> bool {
        self.state.borrow().selected
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Addresses of every transaction, in order, with the read flag intact.
    pub fn addresses(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut first = false;
        for op in self.state.borrow().operations.iter() {
            match *op {
                Operation::Select => first = true,
                Operation::Transfer { mosi, .. } if first => {
                    out.push(mosi);
                    first = false;
                }
                _ => {}
            }
        }
        out
    }
}

impl ByteBus for MockBus {
    type Error = BusFault;

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, BusFault> {
        let mut st = self.state.borrow_mut();
        let index = st.transfers;
        st.transfers += 1;
        if st.fail_at == Some(index) {
            return Err(BusFault);
        }
        assert!(st.selected, "transfer with chip select released");

        let miso = match st.address.take() {
            None => {
                st.address = Some(byte);
                0x00
            }
            Some(addr) => {
                let reg = (addr & 0x3F) as usize;
                if addr & 0x80 != 0 {
                    let value = st.registers[reg];
                    if reg == 0x37 {
                        let next = st.samples.pop_front();
                        if let Some(next) = next {
                            st.load(next);
                        }
                    }
                    value
                } else {
                    st.registers[reg] = byte;
                    0x00
                }
            }
        };
        st.operations.push(Operation::Transfer { mosi: byte, miso });
        Ok(miso)
    }
}

impl SelectLine for MockBus {
    fn select(&mut self) {
        let mut st = self.state.borrow_mut();
        st.selected = true;
        st.address = None;
        st.operations.push(Operation::Select);
    }

    fn deselect(&mut self) {
        let mut st = self.state.borrow_mut();
        st.selected = false;
        st.address = None;
        st.operations.push(Operation::Deselect);
    }
}

/// Records every compare value written.
#[derive(Clone, Default)]
pub struct MockDuty {
    writes: Rc<RefCell<Vec<u16>>>,
}

impl MockDuty {
    pub fn last(&self) -> Option<u16> {
        self.writes.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl DutyOutput for MockDuty {
    fn set_duty(&mut self, compare: u16) {
        self.writes.borrow_mut().push(compare);
    }
}

/// Tracks the indicator level.
#[derive(Clone, Default)]
pub struct MockIndicator {
    on: Rc<RefCell<bool>>,
}

impl MockIndicator {
    pub fn is_on(&self) -> bool {
        *self.on.borrow()
    }
}

impl IndicatorLine for MockIndicator {
    fn set(&mut self, on: bool) {
        *self.on.borrow_mut() = on;
    }
}
