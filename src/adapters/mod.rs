//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements              | Connects to            |
//! |-------------|-------------------------|------------------------|
//! | `adc`       | AnalogInput             | ESP32 ADC1 oneshot     |
//! | `pwm`       | embedded-hal SetDutyCycle | ESP32 LEDC channel   |
//! | `hardware`  | SensorPort              | PressureSensor         |
//! |             | ActuatorPort            | LedController, HeatController |
//! | `log_sink`  | EventSink               | Serial log output      |
//! | `time`      | -                       | ESP32 system timer     |

pub mod adc;
pub mod hardware;
pub mod log_sink;
pub mod pwm;
pub mod time;
