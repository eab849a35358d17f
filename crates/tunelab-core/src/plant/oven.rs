//! Thermal oven plant.

use tunelab_types::OvenParams;

use super::Plant;

/// A lumped thermal model of an oven cavity.
///
/// The input is heater duty in percent (0..100). Heat flows in from the
/// heater and out toward ambient; opening the door multiplies the loss
/// coefficient. `time_scale` compresses the slow thermal dynamics so the
/// widget settles within a few on-screen seconds.
///
/// temp' = temp + ((heat_in - heat_loss) / thermal_mass) * dt * time_scale
#[derive(Debug, Clone)]
pub struct OvenPlant {
    params: OvenParams,

    // State
    temperature: f64,

    // Initial condition
    initial_temperature: f64,
}

impl OvenPlant {
    pub fn new(params: OvenParams) -> Self {
        Self {
            params,
            temperature: params.ambient,
            initial_temperature: params.ambient,
        }
    }

    pub fn params(&self) -> OvenParams {
        self.params
    }

    pub fn params_mut(&mut self) -> &mut OvenParams {
        &mut self.params
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_door_open(&mut self, open: bool) {
        self.params.door_open = open;
    }
}

impl Plant for OvenPlant {
    fn step(&mut self, duty: f64, dt: f64) {
        let duty = duty.clamp(0.0, 100.0);
        let heat_in = duty / 100.0 * self.params.heater_power;

        let loss_multiplier = if self.params.door_open {
            self.params.door_loss_multiplier
        } else {
            1.0
        };
        let heat_loss =
            self.params.loss_coeff * (self.temperature - self.params.ambient) * loss_multiplier;

        self.temperature +=
            (heat_in - heat_loss) / self.params.thermal_mass * dt * self.params.time_scale;
    }

    fn measured(&self) -> f64 {
        self.temperature
    }

    fn reset(&mut self) {
        self.temperature = self.initial_temperature;
    }
}
