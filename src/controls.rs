//! Between-frame state updates. Event polling lives outside the crate; a
//! front end maps its keys onto [`Command`]s and applies them to the scene.

use std::str::FromStr;

use crate::{error::Error, scene::Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CameraForward,
    CameraBack,
    CameraLeft,
    CameraRight,
    YawLeft,
    YawRight,
    LightForward,
    LightBack,
    LightUp,
    LightDown,
    LightLeft,
    LightRight,
    Reset,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::CameraForward,
        Command::CameraBack,
        Command::CameraLeft,
        Command::CameraRight,
        Command::YawLeft,
        Command::YawRight,
        Command::LightForward,
        Command::LightBack,
        Command::LightUp,
        Command::LightDown,
        Command::LightLeft,
        Command::LightRight,
        Command::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::CameraForward => "camera-forward",
            Command::CameraBack => "camera-back",
            Command::CameraLeft => "camera-left",
            Command::CameraRight => "camera-right",
            Command::YawLeft => "yaw-left",
            Command::YawRight => "yaw-right",
            Command::LightForward => "light-forward",
            Command::LightBack => "light-back",
            Command::LightUp => "light-up",
            Command::LightDown => "light-down",
            Command::LightLeft => "light-left",
            Command::LightRight => "light-right",
            Command::Reset => "reset",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

impl Scene {
    /// Applies one input step. Movement is measured along the camera axes
    /// as they are before the step.
    pub fn apply(&mut self, cmd: Command) {
        let cam = &mut self.camera;
        let step = cam.move_speed;
        let (forward, right, down) = (cam.forward(), cam.right(), cam.down());

        match cmd {
            Command::CameraForward => cam.translate(forward * step),
            Command::CameraBack => cam.translate(-forward * step),
            Command::CameraLeft => cam.translate(-right * step),
            Command::CameraRight => cam.translate(right * step),
            Command::YawLeft => cam.yaw(-cam.yaw_step),
            Command::YawRight => cam.yaw(cam.yaw_step),
            Command::LightForward => self.light.translate(forward * step),
            Command::LightBack => self.light.translate(-forward * step),
            Command::LightUp => self.light.translate(-down * step),
            Command::LightDown => self.light.translate(down * step),
            Command::LightLeft => self.light.translate(-right * step),
            Command::LightRight => self.light.translate(right * step),
            Command::Reset => self.reset(),
        }
    }
}
