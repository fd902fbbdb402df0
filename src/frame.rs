//! Target frames and their conversion to controller poses.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance applied by [`Frame::new`] when checking the axis invariant.
const AXIS_TOLERANCE: f64 = 1.0e-6;

/// Six joint angles in degrees, base to wrist. Passed through to the
/// controller unconverted and unvalidated.
pub type JointAngles = [f64; 6];

/// Error returned when a [`Frame`] is built from axes that violate the
/// orthonormality invariant.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum FrameError {
    /// One or both axis vectors are not unit length.
    #[error("frame axes must be unit length (|x| = {x_len}, |y| = {y_len})")]
    NonUnitAxis { x_len: f64, y_len: f64 },

    /// The axis vectors are not perpendicular to each other.
    #[error("frame axes must be orthogonal (x . y = {dot})")]
    NonOrthogonalAxes { dot: f64 },
}

/// An oriented coordinate system describing a motion target.
///
/// A frame is an origin point in millimeters plus two orthonormal axis
/// vectors; the Z axis is implied by right-hand orientation. Orthonormality
/// is the caller's responsibility: conversion never re-orthonormalizes, and
/// a frame built through [`Frame::new_unchecked`] with skewed axes produces
/// undefined (but never panicking) rotation values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Origin of the frame in the robot base coordinate system, millimeters.
    pub origin_mm: DVec3,

    /// Unit X axis of the frame.
    pub x_axis: DVec3,

    /// Unit Y axis of the frame.
    pub y_axis: DVec3,
}

impl Frame {
    /// The identity frame: origin at zero, axes aligned with the base axes.
    pub const WORLD: Frame = Frame {
        origin_mm: DVec3::ZERO,
        x_axis: DVec3::X,
        y_axis: DVec3::Y,
    };

    /// Creates a frame, checking the axis invariant.
    ///
    /// Both axes must be unit length and mutually orthogonal within `1e-6`.
    pub fn new(origin_mm: DVec3, x_axis: DVec3, y_axis: DVec3) -> Result<Self, FrameError> {
        let x_len = x_axis.length();
        let y_len = y_axis.length();
        if (x_len - 1.0).abs() > AXIS_TOLERANCE || (y_len - 1.0).abs() > AXIS_TOLERANCE {
            return Err(FrameError::NonUnitAxis { x_len, y_len });
        }
        let dot = x_axis.dot(y_axis);
        if dot.abs() > AXIS_TOLERANCE {
            return Err(FrameError::NonOrthogonalAxes { dot });
        }
        Ok(Self {
            origin_mm,
            x_axis,
            y_axis,
        })
    }

    /// Creates a frame without checking the axis invariant.
    ///
    /// For callers that already guarantee orthonormal axes (e.g. frames
    /// produced by a CAD kernel or composed from unit quaternions).
    pub fn new_unchecked(origin_mm: DVec3, x_axis: DVec3, y_axis: DVec3) -> Self {
        Self {
            origin_mm,
            x_axis,
            y_axis,
        }
    }

    /// Creates a base-aligned frame at `origin_mm`.
    pub fn from_origin(origin_mm: DVec3) -> Self {
        Self {
            origin_mm,
            ..Self::WORLD
        }
    }

    /// The implied Z axis (right-hand orientation).
    pub fn z_axis(&self) -> DVec3 {
        self.x_axis.cross(self.y_axis)
    }

    /// The frame's orientation as a rotation from the base axes.
    pub fn rotation(&self) -> DQuat {
        DQuat::from_mat3(&DMat3::from_cols(self.x_axis, self.y_axis, self.z_axis()))
    }

    /// Converts this frame to a [`Pose`] relative to the world frame.
    pub fn pose(&self) -> Pose {
        self.pose_relative_to(&Frame::WORLD)
    }

    /// Converts this frame to a [`Pose`] relative to `reference`.
    ///
    /// The rotation part is the rigid rotation mapping `reference` onto this
    /// frame, expressed as an axis-angle vector. The translation is always
    /// the frame origin converted to meters; the mm-to-m division is a fixed
    /// contract of the emitted protocol, not a configurable unit.
    pub fn pose_relative_to(&self, reference: &Frame) -> Pose {
        let rotation = self.rotation() * reference.rotation().inverse();
        Pose {
            translation_m: self.origin_mm / 1000.0,
            axis_angle: axis_angle_of(rotation),
        }
    }
}

/// A 6-DOF pose in the controller's native representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Translation in meters.
    pub translation_m: DVec3,

    /// Rotation axis scaled by the rotation angle in radians.
    pub axis_angle: DVec3,
}

impl Pose {
    /// Creates a pose from an already-converted translation and rotation.
    pub fn new(translation_m: DVec3, axis_angle: DVec3) -> Self {
        Self {
            translation_m,
            axis_angle,
        }
    }
}

/// Extracts the axis-angle vector of `rotation`.
///
/// The vector's direction is the rotation axis and its magnitude the
/// rotation angle in radians, kept in `[0, pi]` by canonicalizing the
/// quaternion sign. The identity rotation yields exactly the zero vector;
/// no arbitrary axis is chosen. Going through the quaternion keeps the
/// extraction well conditioned near 180 degrees, where the matrix trace
/// formula divides by near-zero.
pub fn axis_angle_of(rotation: DQuat) -> DVec3 {
    let canonical = if rotation.w < 0.0 {
        -rotation
    } else {
        rotation
    };
    canonical.to_scaled_axis()
}
