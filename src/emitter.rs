//! Emitter that turns poses and joint targets into URScript motion commands.
//!
//! The entry point is [`ScriptEmitter`]. Configure it with an
//! [`EmitterConfig`], then call the motion builders; every builder is a pure
//! function of its inputs and returns one newline-terminated
//! [`ScriptCommand`]. The emitter holds no state across calls, so a single
//! instance can be shared freely between threads.

use crate::frame::{Frame, JointAngles, Pose, axis_angle_of};
use crate::script::ScriptCommand;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Safety limits for script emission.
///
/// The limits are hard ceilings applied to every Cartesian motion command;
/// callers cannot request more than the configured maxima, whatever they
/// pass in. Keeping them per-emitter instead of process-wide lets robots
/// with different limits be compiled against concurrently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Maximum tool acceleration in m/s^2.
    pub max_accel_m_s2: f64,

    /// Maximum tool speed in m/s.
    pub max_velocity_m_s: f64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_accel_m_s2: 2.5,
            max_velocity_m_s: 2.5,
        }
    }
}

/// Compiles poses and joint targets into URScript motion commands.
pub struct ScriptEmitter {
    config: EmitterConfig,
}

impl ScriptEmitter {
    /// Creates an emitter with the given safety limits.
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// The limits this emitter clamps against.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Normalizes acceleration and velocity into `[0, max]`.
    ///
    /// Sign is discarded before clamping. `f64::min` returns the other
    /// operand for NaN input, so malformed values collapse into the ceiling
    /// instead of escaping it.
    fn clamp_motion(&self, accel: f64, vel: f64) -> (f64, f64) {
        let clamped_accel = accel.abs().min(self.config.max_accel_m_s2);
        let clamped_vel = vel.abs().min(self.config.max_velocity_m_s);
        if clamped_accel != accel || clamped_vel != vel {
            debug!(
                accel,
                vel, clamped_accel, clamped_vel, "motion parameters clamped"
            );
        }
        (clamped_accel, clamped_vel)
    }

    /// Linear move in tool-space to `pose`.
    ///
    /// `accel` (m/s^2) and `vel` (m/s) are clamped to the configured limits.
    pub fn linear_move(&self, pose: &Pose, accel: f64, vel: f64) -> ScriptCommand {
        let (accel, vel) = self.clamp_motion(accel, vel);
        ScriptCommand::new(format!(
            "movel({}, a={accel:.2}, v={vel:.2})\n",
            pose_literal(pose)
        ))
    }

    /// Linear move with a blend radius, allowing continuous motion through
    /// consecutive targets.
    ///
    /// Negative blend radii are floored to zero. Note the precision
    /// asymmetry against [`linear_move`](Self::linear_move): the blended
    /// variants format a/v/r with three decimals. The controller parses each
    /// command's exact text, so the two stay separate operations rather than
    /// being unified.
    pub fn linear_move_blend(
        &self,
        pose: &Pose,
        accel: f64,
        vel: f64,
        blend_m: f64,
    ) -> ScriptCommand {
        let (accel, vel) = self.clamp_motion(accel, vel);
        let blend_m = clamp_blend(blend_m);
        ScriptCommand::new(format!(
            "movel({}, a={accel:.3}, v={vel:.3}, r={blend_m:.3})\n",
            pose_literal(pose)
        ))
    }

    /// Process move with a blend radius: constant tool speed along the path,
    /// for dispensing and similar continuous processes.
    pub fn process_move_blend(
        &self,
        pose: &Pose,
        accel: f64,
        vel: f64,
        blend_m: f64,
    ) -> ScriptCommand {
        let (accel, vel) = self.clamp_motion(accel, vel);
        let blend_m = clamp_blend(blend_m);
        ScriptCommand::new(format!(
            "movep({}, a={accel:.3}, v={vel:.3}, r={blend_m:.3})\n",
            pose_literal(pose)
        ))
    }

    /// Joint-space move to the six `joints` angles (degrees).
    ///
    /// Unlike the Cartesian builders this does not clamp `accel`/`vel`;
    /// existing programs rely on the unclamped text, so the omission is kept
    /// as the compatibility surface. Prefer
    /// [`joint_move_clamped`](Self::joint_move_clamped) when compatibility
    /// with such programs is not required.
    pub fn joint_move(&self, joints: &JointAngles, accel: f64, vel: f64) -> ScriptCommand {
        ScriptCommand::new(format!(
            "movej({}, a={accel:.2}, v={vel:.2})\n",
            joints_literal(joints)
        ))
    }

    /// Joint-space move with the same parameter clamping as the Cartesian
    /// builders.
    pub fn joint_move_clamped(&self, joints: &JointAngles, accel: f64, vel: f64) -> ScriptCommand {
        let (accel, vel) = self.clamp_motion(accel, vel);
        self.joint_move(joints, accel, vel)
    }

    /// Sets the tool center point from a tip offset and an orientation frame.
    ///
    /// Offsets are millimeters, converted to meters. When `reference` is
    /// exactly [`Frame::WORLD`] the rotation is the zero vector without any
    /// conversion; this is an equality fast path, not a tolerance check.
    pub fn set_tcp(&self, offset_mm: DVec3, reference: &Frame) -> ScriptCommand {
        let axis_angle = if reference == &Frame::WORLD {
            DVec3::ZERO
        } else {
            reference.pose().axis_angle
        };
        tcp_command(offset_mm, axis_angle)
    }

    /// Sets the tool center point from a tip offset and elemental rotations.
    ///
    /// The tip orientation is the product of rotations about the world X, Y
    /// and Z axes in that order, each in radians.
    pub fn set_tcp_by_angles(&self, offset_mm: DVec3, rotation_rad: DVec3) -> ScriptCommand {
        let rotation = DQuat::from_rotation_x(rotation_rad.x)
            * DQuat::from_rotation_y(rotation_rad.y)
            * DQuat::from_rotation_z(rotation_rad.z);
        tcp_command(offset_mm, axis_angle_of(rotation))
    }
}

fn tcp_command(offset_mm: DVec3, axis_angle: DVec3) -> ScriptCommand {
    let pose = Pose::new(offset_mm / 1000.0, axis_angle);
    ScriptCommand::new(format!("set_tcp({})\n", pose_literal(&pose)))
}

/// Formats a pose as the URScript `p[...]` literal, four decimals per field.
fn pose_literal(pose: &Pose) -> String {
    let t = pose.translation_m;
    let r = pose.axis_angle;
    format!(
        "p[{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}]",
        t.x, t.y, t.z, r.x, r.y, r.z
    )
}

/// Formats six joint angles as a URScript list, two decimals per field.
fn joints_literal(joints: &JointAngles) -> String {
    format!(
        "[{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}]",
        joints[0], joints[1], joints[2], joints[3], joints[4], joints[5]
    )
}

/// Blend radii must be non-negative; `f64::max` collapses NaN to zero.
fn clamp_blend(blend: f64) -> f64 {
    blend.max(0.0)
}
