//! Common test utilities and mock implementations

pub mod mock_bus;

pub use mock_bus::{BusFault, MockBus, MockDuty, MockIndicator, Operation};

use leveler::drivers::Adxl345;
use leveler::LevelController;

pub type MockController = LevelController<MockBus, MockDuty, MockDuty, MockIndicator>;

/// Handles the test keeps to observe what the controller did.
pub struct Rig {
    pub bus: MockBus,
    pub out_x: MockDuty,
    pub out_y: MockDuty,
    pub led: MockIndicator,
}

/// Build a controller wired to mocks. The bus handle doubles as the chip select.
pub fn create_mock_controller() -> (MockController, Rig) {
    let bus = MockBus::new();
    let out_x = MockDuty::default();
    let out_y = MockDuty::default();
    let led = MockIndicator::default();

    let controller = LevelController::new(
        Adxl345::new(bus.clone()),
        out_x.clone(),
        out_y.clone(),
        led.clone(),
    );

    (
        controller,
        Rig {
            bus,
            out_x,
            out_y,
            led,
        },
    )
}
