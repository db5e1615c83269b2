//! One interactive cube: a net, its base cell, the fold animator and the
//! pose transitioner, tied together by a cached hierarchy.

pub mod command;

use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use serde::Serialize;

pub use command::{CubeCommand, RotationRequest};

use crate::animation::{
    FoldAnimator, FoldMode, PoseTransitioner, RequestOutcome, FULL_PROGRESS,
};
use crate::error::CubeNetError;
use crate::hierarchy::{resolve, Hierarchy};
use crate::net::{self, NetGrid};
use crate::options::Options;
use crate::orientation::Orientation;
use crate::topology::Face;

/// Owns all state of one cube and advances it tick by tick.
///
/// The hierarchy is rebuilt only when the net, the base cell or the resting
/// orientation changes; every other tick reuses the cached one.
#[derive(Debug, Clone)]
pub struct CubeSession {
    grid: NetGrid,
    net_name: Option<String>,
    base_index: usize,
    fold: FoldAnimator,
    pose: PoseTransitioner,
    position: Vec3,
    hierarchy: Hierarchy,
    angles: Vec<f32>,
}

impl CubeSession {
    /// Session resting in `orientation` with default animation settings.
    ///
    /// Fails if the net cannot be folded from `base_index`.
    pub fn new(
        grid: NetGrid,
        base_index: usize,
        orientation: Orientation,
    ) -> Result<Self, CubeNetError> {
        let hierarchy = resolve(&grid, base_index, orientation.base())?;
        let fold = FoldAnimator::default();
        let angles = fold.angles(hierarchy.hinges().len());
        Ok(Self {
            grid,
            net_name: None,
            base_index,
            fold,
            pose: PoseTransitioner::new(orientation),
            position: Vec3::ZERO,
            hierarchy,
            angles,
        })
    }

    /// Session configured from [`Options`].
    pub fn from_options(options: &Options) -> Result<Self, CubeNetError> {
        let s = &options.session;
        let variant = net::find(&s.net)?;
        let mut session = Self::new(variant.grid()?, s.base_cell, s.orientation)?;
        session.net_name = Some(variant.name_code());
        session.position = Vec3::from_array(s.position);

        let f = &options.fold;
        session.fold = FoldAnimator::new(f.mode, f.initial_progress)
            .with_speed(f.autoplay_speed);
        session.fold.set_autoplay(f.autoplay);
        session.pose = PoseTransitioner::new(s.orientation)
            .with_motion(options.pose.initial_speed, options.pose.acceleration);
        session.refresh_angles();
        Ok(session)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// The current net.
    #[must_use]
    pub fn grid(&self) -> &NetGrid {
        &self.grid
    }

    /// Catalog name code of the current net, if it came from the catalog.
    #[must_use]
    pub fn net_name(&self) -> Option<&str> {
        self.net_name.as_deref()
    }

    /// Index of the base cell among the occupied cells.
    #[must_use]
    pub fn base_index(&self) -> usize {
        self.base_index
    }

    /// The cached hierarchy.
    #[must_use]
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Current fold angles in radians, one per hinge.
    #[must_use]
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Fold progress state.
    #[must_use]
    pub fn fold(&self) -> &FoldAnimator {
        &self.fold
    }

    /// Pose transition state.
    #[must_use]
    pub fn pose(&self) -> &PoseTransitioner {
        &self.pose
    }

    /// World position of the cube's center.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the cube's center.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Read-only view of everything a renderer needs this frame.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            net_name: self.net_name.as_deref(),
            base_index: self.base_index,
            hierarchy: &self.hierarchy,
            angles: &self.angles,
            progress: self.fold.progress(),
            mode: self.fold.mode(),
            autoplay: self.fold.is_autoplay(),
            current: self.pose.current(),
            next: self.pose.next(),
            transitioning: self.pose.is_transitioning(),
            rotation: self.pose.displayed_rotation(),
            position: self.position,
        }
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Replace the net. The base index is kept and the cube closes again.
    ///
    /// On error the previous net stays selected.
    pub fn select_net(&mut self, grid: NetGrid) -> Result<(), CubeNetError> {
        self.replace_net(grid, None)
    }

    /// Select a catalog net by name code.
    pub fn select_catalog_net(
        &mut self,
        name_code: &str,
    ) -> Result<(), CubeNetError> {
        let variant = net::find(name_code)?;
        self.replace_net(variant.grid()?, Some(variant.name_code()))
    }

    fn replace_net(
        &mut self,
        grid: NetGrid,
        name: Option<String>,
    ) -> Result<(), CubeNetError> {
        let hierarchy = self
            .resolve_with(&grid, self.base_index)
            .inspect_err(|e| log::warn!("net rejected: {e}"))?;
        log::info!(
            "net selected: {}",
            name.as_deref().unwrap_or("custom grid")
        );
        self.grid = grid;
        self.net_name = name;
        self.install(hierarchy);
        Ok(())
    }

    /// Choose the base cell. The cube closes again.
    ///
    /// On error the previous base cell stays selected.
    pub fn select_base_cell(
        &mut self,
        index: usize,
    ) -> Result<(), CubeNetError> {
        let hierarchy = self
            .resolve_with(&self.grid, index)
            .inspect_err(|e| log::warn!("base cell {index} rejected: {e}"))?;
        self.base_index = index;
        self.install(hierarchy);
        Ok(())
    }

    /// Change the fold mode. The cube closes again once no pose change is
    /// running.
    pub fn set_animation_mode(&mut self, mode: FoldMode) {
        self.fold.set_mode(mode);
        self.refresh_angles();
    }

    /// Set the fold progress, clamped to `[0, 100]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.fold.set_progress(progress);
        self.refresh_angles();
    }

    /// Start or stop autoplay.
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.fold.set_autoplay(enabled);
    }

    /// Start a pose change; `Random` draws from the thread-local generator.
    pub fn request_rotation(
        &mut self,
        request: RotationRequest,
    ) -> RequestOutcome {
        self.request_rotation_with(request, &mut rand::rng())
    }

    /// Start a pose change, drawing `Random` targets from `rng`.
    pub fn request_rotation_with<R: Rng + ?Sized>(
        &mut self,
        request: RotationRequest,
        rng: &mut R,
    ) -> RequestOutcome {
        match request {
            RotationRequest::Turn(op) => self.pose.request(op),
            RotationRequest::To(target) => self.pose.request_to(target),
            RotationRequest::Canonical => {
                self.pose.request_to(Orientation::CANONICAL)
            }
            RotationRequest::Random => {
                self.pose.request_to(Orientation::random(rng))
            }
        }
    }

    /// Apply a [`CubeCommand`].
    ///
    /// `Rotate` yields the [`RequestOutcome`] so a dropped request can be
    /// reported to the user; every other command yields `None`.
    pub fn execute(
        &mut self,
        command: CubeCommand,
    ) -> Result<Option<RequestOutcome>, CubeNetError> {
        match command {
            CubeCommand::SelectNet { name } => {
                self.select_catalog_net(&name)?;
            }
            CubeCommand::SelectGrid { grid } => self.select_net(grid)?,
            CubeCommand::SelectBaseCell { index } => {
                self.select_base_cell(index)?;
            }
            CubeCommand::SetAnimationMode { mode } => {
                self.set_animation_mode(mode);
            }
            CubeCommand::SetProgress { progress } => {
                self.set_progress(progress);
            }
            CubeCommand::SetAutoplay { enabled } => self.set_autoplay(enabled),
            CubeCommand::Rotate { request } => {
                return Ok(Some(self.request_rotation(request)));
            }
        }
        Ok(None)
    }

    // ── Frame update ────────────────────────────────────────────────

    /// Advance by `dt` seconds.
    ///
    /// While a pose change runs the fold angles stay frozen; the hierarchy is
    /// rebuilt for the new base face on the tick the change completes.
    /// Otherwise the fold animator advances.
    pub fn tick(&mut self, dt: f32) {
        if self.pose.is_transitioning() {
            if self.pose.tick(dt) {
                self.recompute();
            }
            return;
        }
        self.fold.tick(dt);
        self.refresh_angles();
    }

    fn resolve_with(
        &self,
        grid: &NetGrid,
        base_index: usize,
    ) -> Result<Hierarchy, CubeNetError> {
        resolve(grid, base_index, self.pose.current().base())
    }

    fn install(&mut self, hierarchy: Hierarchy) {
        self.hierarchy = hierarchy;
        self.fold.reset(FULL_PROGRESS);
        self.refresh_angles();
    }

    fn recompute(&mut self) {
        match self.resolve_with(&self.grid, self.base_index) {
            Ok(hierarchy) => {
                log::debug!(
                    "hierarchy rebuilt: root {} at {}",
                    hierarchy.root(),
                    hierarchy.base_cell()
                );
                self.hierarchy = hierarchy;
            }
            Err(e) => log::warn!("keeping previous hierarchy: {e}"),
        }
        self.refresh_angles();
    }

    /// Angles stay frozen while a pose change runs; completion refreshes
    /// them.
    fn refresh_angles(&mut self) {
        if self.pose.is_transitioning() {
            return;
        }
        self.angles = self.fold.angles(self.hierarchy.hinges().len());
    }
}

/// Per-frame view of a [`CubeSession`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSnapshot<'a> {
    /// Catalog name code of the net, if any.
    pub net_name: Option<&'a str>,
    /// Index of the base cell.
    pub base_index: usize,
    /// Labelled net and hinges.
    pub hierarchy: &'a Hierarchy,
    /// Fold angle per hinge, radians.
    pub angles: &'a [f32],
    /// Fold progress in `[0, 100]`.
    pub progress: f32,
    /// Fold mode.
    pub mode: FoldMode,
    /// Whether autoplay runs.
    pub autoplay: bool,
    /// Orientation at rest (or being left).
    pub current: Orientation,
    /// Orientation being approached.
    pub next: Orientation,
    /// Whether a pose change is in progress.
    pub transitioning: bool,
    /// Rotation to display this frame.
    pub rotation: Quat,
    /// World position of the cube's center.
    pub position: Vec3,
}

impl SessionSnapshot<'_> {
    /// World transform of the cube: translation then displayed rotation.
    #[must_use]
    pub fn cube_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World transform of every face, root first.
    #[must_use]
    pub fn face_transforms(&self) -> Vec<(Face, Mat4)> {
        let cube = self.cube_transform();
        self.hierarchy
            .face_transforms(self.angles)
            .into_iter()
            .map(|(face, m)| (face, cube * m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::InvalidNetReason;
    use crate::net::{find, GRID_SIZE};
    use crate::orientation::RotationOp;
    use crate::topology::OrientedFace;

    const DT: f32 = 1.0 / 60.0;

    fn cross() -> NetGrid {
        find("Cross-0").unwrap().grid().unwrap()
    }

    fn session() -> CubeSession {
        CubeSession::new(cross(), 5, Orientation::CANONICAL).unwrap()
    }

    fn finish_pose(s: &mut CubeSession) {
        for _ in 0..1000 {
            if !s.pose().is_transitioning() {
                return;
            }
            s.tick(DT);
        }
        panic!("pose change never finished");
    }

    #[test]
    fn test_initial_state_is_closed() {
        let s = session();
        let snap = s.snapshot();
        assert_eq!(snap.hierarchy.root(), OrientedFace::new(Face::Down, 0));
        assert_eq!(snap.angles.len(), 5);
        assert!(snap.angles.iter().all(|a| (a - FRAC_PI_2).abs() < 1e-5));
        assert!(s.fold().is_closed());
        assert!(!snap.transitioning);
    }

    #[test]
    fn test_select_net_is_idempotent() {
        let mut s = session();
        let g = find("Bone-f-2").unwrap().grid().unwrap();
        s.select_net(g.clone()).unwrap();
        let first = s.hierarchy().clone();
        s.select_net(g).unwrap();
        assert_eq!(s.hierarchy(), &first);
    }

    #[test]
    fn test_invalid_net_keeps_previous_state() {
        let mut s = session();
        s.set_progress(30.0);
        let before = s.hierarchy().clone();
        let err = s.select_catalog_net("Skis-0").unwrap_err();
        assert!(matches!(
            err,
            CubeNetError::InvalidNet(InvalidNetReason::DuplicateFace { .. })
        ));
        assert_eq!(s.hierarchy(), &before);
        assert_eq!(s.grid(), &cross());
        assert_eq!(s.fold().progress(), 30.0);
        assert!(matches!(
            s.select_catalog_net("Nope-0"),
            Err(CubeNetError::UnknownNet(_))
        ));
    }

    #[test]
    fn test_select_resets_progress() {
        let mut s = session();
        s.set_progress(10.0);
        s.select_base_cell(2).unwrap();
        assert_eq!(s.fold().progress(), 100.0);
        assert_eq!(s.hierarchy().base_cell(), s.grid().base_cell(2).unwrap());

        s.set_progress(10.0);
        s.select_catalog_net("Stairs-1").unwrap();
        assert_eq!(s.net_name(), Some("Stairs-1"));
        assert_eq!(s.fold().progress(), 100.0);

        s.set_progress(10.0);
        s.set_animation_mode(FoldMode::LeafFirst);
        assert_eq!(s.fold().progress(), 100.0);
    }

    #[test]
    fn test_base_cell_out_of_range_rejected() {
        let mut s = session();
        assert!(s.select_base_cell(6).is_err());
        assert_eq!(s.base_index(), 5);
    }

    #[test]
    fn test_angles_frozen_during_pose_change() {
        let mut s = session();
        s.set_progress(50.0);
        s.set_autoplay(true);
        let frozen = s.angles().to_vec();
        assert_eq!(
            s.request_rotation(RotationRequest::Turn(RotationOp::XPos)),
            RequestOutcome::Started
        );
        s.tick(DT);
        assert!(s.snapshot().transitioning);
        assert_eq!(s.angles(), frozen.as_slice());
        assert_eq!(s.fold().progress(), 50.0);
    }

    #[test]
    fn test_pose_completion_rebuilds_hierarchy() {
        let mut s = session();
        let _ = s.request_rotation(RotationRequest::Turn(RotationOp::XPos));
        finish_pose(&mut s);
        let expected = Orientation::CANONICAL.transition(RotationOp::XPos);
        assert_eq!(s.pose().current(), expected);
        assert_eq!(s.hierarchy().root(), expected.base());

        let _ = s.request_rotation(RotationRequest::Turn(RotationOp::XPos));
        finish_pose(&mut s);
        assert_eq!(s.pose().current(), expected.transition(RotationOp::XPos));
        assert_eq!(s.hierarchy().root(), s.pose().current().base());
    }

    #[test]
    fn test_rotation_requests() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            s.request_rotation_with(RotationRequest::Random, &mut rng),
            RequestOutcome::Started
        );
        assert_eq!(
            s.request_rotation(RotationRequest::Canonical),
            RequestOutcome::Ignored
        );
        finish_pose(&mut s);
        let _ = s.request_rotation(RotationRequest::Canonical);
        finish_pose(&mut s);
        assert!(s.pose().current().is_canonical());
    }

    #[test]
    fn test_execute_commands() {
        let mut s = session();
        let selected = s.execute(CubeCommand::SelectNet {
            name: "Pickaxe-0".to_owned(),
        });
        assert_eq!(selected.unwrap(), None);
        let mode = s.execute(CubeCommand::SetAnimationMode {
            mode: FoldMode::RootFirst,
        });
        assert_eq!(mode.unwrap(), None);
        let progress = s.execute(CubeCommand::SetProgress { progress: 50.0 });
        assert_eq!(progress.unwrap(), None);
        assert!((s.angles()[0] - FRAC_PI_2).abs() < 1e-5);
        assert!(s.angles()[4].abs() < 1e-5);
        let rotate = s.execute(CubeCommand::Rotate {
            request: "TL".parse().unwrap(),
        });
        assert_eq!(rotate.unwrap(), Some(RequestOutcome::Started));
        finish_pose(&mut s);
        assert_eq!(s.pose().current().to_string(), "TL");

        let mut rows = [[0u8; GRID_SIZE]; GRID_SIZE];
        rows[0][..6].fill(1);
        assert!(s
            .execute(CubeCommand::SelectGrid {
                grid: NetGrid::from_rows(rows).unwrap()
            })
            .is_err());
        assert!(s.execute(CubeCommand::SelectBaseCell { index: 9 }).is_err());
    }

    #[test]
    fn test_execute_reports_ignored_rotation() {
        let mut s = session();
        let turn = || CubeCommand::Rotate {
            request: RotationRequest::Turn(RotationOp::YPos),
        };
        assert_eq!(s.execute(turn()).unwrap(), Some(RequestOutcome::Started));
        assert_eq!(s.execute(turn()).unwrap(), Some(RequestOutcome::Ignored));
        finish_pose(&mut s);
        assert_eq!(s.execute(turn()).unwrap(), Some(RequestOutcome::Started));
    }

    #[test]
    fn test_angles_frozen_across_selection_during_pose_change() {
        let mut s = session();
        s.set_progress(30.0);
        let frozen = s.angles().to_vec();
        let _ = s.request_rotation(RotationRequest::Turn(RotationOp::ZPos));
        s.tick(DT);
        s.select_catalog_net("Bone-0").unwrap();
        s.select_base_cell(1).unwrap();
        s.set_progress(70.0);
        assert_eq!(s.angles(), frozen.as_slice());

        finish_pose(&mut s);
        assert_eq!(s.fold().progress(), 70.0);
        assert_eq!(s.angles(), s.fold().angles(5).as_slice());
    }

    #[test]
    fn test_zero_acceleration_option_still_completes() {
        let mut options = Options::default();
        options.pose.acceleration = 0.0;
        let toml = toml::to_string(&options).unwrap();
        let options = Options::from_toml(&toml).unwrap();
        let mut s = CubeSession::from_options(&options).unwrap();
        let _ = s.request_rotation(RotationRequest::Turn(RotationOp::XPos));
        finish_pose(&mut s);
        assert_eq!(
            s.request_rotation(RotationRequest::Canonical),
            RequestOutcome::Started
        );
    }

    #[test]
    fn test_autoplay_runs_through_tick() {
        let mut s = session();
        s.set_progress(0.0);
        s.set_autoplay(true);
        s.tick(1.0);
        assert!((s.fold().progress() - 20.0).abs() < 1e-4);
        let expected = s.fold().angles(5);
        assert_eq!(s.angles(), expected.as_slice());
    }

    #[test]
    fn test_from_options() {
        let mut options = Options::default();
        options.session.net = "Cross-0".to_owned();
        options.session.base_cell = 5;
        options.fold.mode = FoldMode::LeafFirst;
        options.fold.initial_progress = 0.0;
        let s = CubeSession::from_options(&options).unwrap();
        assert_eq!(s.net_name(), Some("Cross-0"));
        assert_eq!(s.position(), Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(s.fold().mode(), FoldMode::LeafFirst);
        assert!(s.angles().iter().all(|a| a.abs() < 1e-6));

        options.session.net = "Triangle-0".to_owned();
        assert!(CubeSession::from_options(&options).is_err());
    }

    #[test]
    fn test_snapshot_transforms() {
        let mut s = session();
        s.set_position(Vec3::new(3.0, 0.5, 0.0));
        let snap = s.snapshot();
        let cube = snap.cube_transform();
        assert!(cube
            .transform_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(3.0, 0.5, 0.0), 1e-6));
        // Closed cube: the base face rests on the table.
        let faces = snap.face_transforms();
        let (root, m) = faces[0];
        assert_eq!(root, Face::Down);
        assert!(m
            .transform_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));

        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(json["current"], "TF");
        assert_eq!(json["mode"], "simultaneous");
    }
}
