use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

/// Identity of a decal, unique for the lifetime of its `DecalField`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecalId(pub u64);

/// How long a decal stays fully visible, then how long it takes to fade out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecalTiming {
    pub dwell_ms: f64,
    pub fade_ms: f64,
}

impl DecalTiming {
    #[inline]
    pub fn lifetime_ms(&self) -> f64 {
        self.dwell_ms + self.fade_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecalPhase {
    Visible,
    Fading,
    Expired,
}

/// A bullet hole left where the user clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct Decal {
    pub id: DecalId,
    pub position: Vec2,
    /// Index into the set of bullet-hole looks.
    pub variant: usize,
    pub born_ms: f64,
    pub fading: bool,
}

impl Decal {
    /// Lifecycle phase at `now_ms`, independent of when the field was last swept.
    pub fn phase(&self, now_ms: f64, timing: &DecalTiming) -> DecalPhase {
        let age = now_ms - self.born_ms;
        if age >= timing.lifetime_ms() {
            DecalPhase::Expired
        } else if age >= timing.dwell_ms {
            DecalPhase::Fading
        } else {
            DecalPhase::Visible
        }
    }
}

/// Active bullet holes, oldest first.
///
/// Decals are appended on spawn and leave only by identity, either through
/// `remove` or when `tick` finds their lifetime has elapsed.
pub struct DecalField {
    timing: DecalTiming,
    variant_count: usize,
    next_id: u64,
    rng: StdRng,
    decals: SmallVec<[Decal; 16]>,
}

impl DecalField {
    pub fn new(timing: DecalTiming, variant_count: usize, rng: StdRng) -> Self {
        Self {
            timing,
            variant_count: variant_count.max(1),
            next_id: 0,
            rng,
            decals: SmallVec::new(),
        }
    }

    /// Append a decal at `position` with a uniformly random look.
    pub fn spawn(&mut self, position: Vec2, now_ms: f64) -> DecalId {
        let id = DecalId(self.next_id);
        self.next_id += 1;
        let variant = self.rng.gen_range(0..self.variant_count);
        self.decals.push(Decal {
            id,
            position,
            variant,
            born_ms: now_ms,
            fading: false,
        });
        id
    }

    /// Advance every decal to its phase at `now_ms` and drop the expired ones.
    ///
    /// Returns the ids that were removed.
    pub fn tick(&mut self, now_ms: f64) -> SmallVec<[DecalId; 4]> {
        let mut expired = SmallVec::new();
        for d in self.decals.iter_mut() {
            match d.phase(now_ms, &self.timing) {
                DecalPhase::Visible => {}
                DecalPhase::Fading => d.fading = true,
                DecalPhase::Expired => expired.push(d.id),
            }
        }
        for id in &expired {
            self.remove(*id);
        }
        expired
    }

    /// Remove the decal with `id`; returns whether it was present.
    pub fn remove(&mut self, id: DecalId) -> bool {
        let before = self.decals.len();
        self.decals.retain(|d| d.id != id);
        self.decals.len() != before
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Decal> {
        self.decals.iter()
    }

    #[inline]
    pub fn get(&self, id: DecalId) -> Option<&Decal> {
        self.decals.iter().find(|d| d.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decals.is_empty()
    }

    #[inline]
    pub fn timing(&self) -> &DecalTiming {
        &self.timing
    }
}
