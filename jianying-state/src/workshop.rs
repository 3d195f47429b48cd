use strum::{AsRefStr, EnumIter};

/// Furthest the puppet can be held from the screen.
pub const MAX_DISTANCE: u8 = 100;
/// At or below this distance the shadow reads as a crisp outline.
pub const SHARP_DISTANCE: u8 = 20;
pub const MAX_BLUR_PX: f64 = 12.0;
pub const DEFAULT_DISTANCE: u8 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Figure {
    #[default]
    Scholar,
    Maiden,
    General,
    Clown,
}

impl Figure {
    pub fn name(self) -> &'static str {
        match self {
            Figure::Scholar => "生角",
            Figure::Maiden => "旦角",
            Figure::General => "武将",
            Figure::Clown => "丑角",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Figure::Scholar => "头戴方巾的书生，线条简洁，刀法讲究一个“秀”字。",
            Figure::Maiden => "发髻高挽的女子，衣纹多用花草镂空，最见刻工。",
            Figure::General => "顶盔贯甲的武将，满身鳞纹，一出场便是千军万马。",
            Figure::Clown => "鼻上一块白的丑角，插科打诨，全场笑声都靠他。",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Figure::Scholar => "生",
            Figure::Maiden => "旦",
            Figure::General => "将",
            Figure::Clown => "丑",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Pose {
    #[default]
    Standing,
    RaisedArm,
    Striding,
}

impl Pose {
    pub fn label(self) -> &'static str {
        match self {
            Pose::Standing => "亮相",
            Pose::RaisedArm => "扬手",
            Pose::Striding => "踏步",
        }
    }

    /// Rotation of the front arm rod in degrees.
    pub fn arm_deg(self) -> i16 {
        match self {
            Pose::Standing => 0,
            Pose::RaisedArm => -120,
            Pose::Striding => -35,
        }
    }

    pub fn leg_deg(self) -> i16 {
        match self {
            Pose::Striding => 25,
            _ => 0,
        }
    }
}

/// Lamp, puppet and screen: the closer the puppet is held to the screen,
/// the smaller and sharper its shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workshop {
    pub figure: Figure,
    pub pose: Pose,
    distance: u8,
}

impl Default for Workshop {
    fn default() -> Self {
        Self {
            figure: Figure::default(),
            pose: Pose::default(),
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl Workshop {
    pub fn distance(&self) -> u8 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: u8) {
        self.distance = distance.min(MAX_DISTANCE);
    }

    pub fn shadow_scale(&self) -> f64 {
        1.0 + f64::from(self.distance) / f64::from(MAX_DISTANCE)
    }

    pub fn shadow_blur_px(&self) -> f64 {
        MAX_BLUR_PX * f64::from(self.distance) / f64::from(MAX_DISTANCE)
    }

    pub fn is_sharp(&self) -> bool {
        self.distance <= SHARP_DISTANCE
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{Figure, Pose, Workshop, DEFAULT_DISTANCE, MAX_BLUR_PX};

    #[test]
    fn shadow_at_the_ends() {
        let mut workshop = Workshop::default();
        workshop.set_distance(0);
        assert_eq!(workshop.shadow_scale(), 1.0);
        assert_eq!(workshop.shadow_blur_px(), 0.0);
        assert!(workshop.is_sharp());

        workshop.set_distance(100);
        assert_eq!(workshop.shadow_scale(), 2.0);
        assert_eq!(workshop.shadow_blur_px(), MAX_BLUR_PX);
        assert!(!workshop.is_sharp());
    }

    #[test]
    fn halfway() {
        let mut workshop = Workshop::default();
        workshop.set_distance(50);
        assert_eq!(workshop.shadow_scale(), 1.5);
        assert_eq!(workshop.shadow_blur_px(), 6.0);
    }

    #[test]
    fn sharp_boundary() {
        let mut workshop = Workshop::default();
        workshop.set_distance(20);
        assert!(workshop.is_sharp());
        workshop.set_distance(21);
        assert!(!workshop.is_sharp());
    }

    #[test]
    fn distance_clamps() {
        let mut workshop = Workshop::default();
        workshop.set_distance(250);
        assert_eq!(workshop.distance(), 100);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut workshop = Workshop::default();
        assert_eq!(workshop.distance(), DEFAULT_DISTANCE);
        assert!(!workshop.is_sharp());

        workshop.figure = Figure::General;
        workshop.pose = Pose::Striding;
        workshop.set_distance(5);
        workshop.reset();
        assert_eq!(workshop, Workshop::default());
    }

    #[test]
    fn figures_and_poses_are_named() {
        assert_eq!(Figure::iter().count(), 4);
        assert_eq!(Pose::RaisedArm.as_ref(), "raised-arm");
        for pose in Pose::iter() {
            assert!(!pose.label().is_empty());
        }
        assert_eq!(Pose::Standing.arm_deg(), 0);
        assert_eq!(Pose::Striding.leg_deg(), 25);
    }
}
