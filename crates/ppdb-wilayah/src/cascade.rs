//! The cascading region selection chain.
//!
//! Selecting a level clears everything downstream (including the postal
//! code) in the same transition, then hands back a [`FetchTicket`] naming
//! the child fetch to run. Fetch results only apply while the ticket's
//! parent still matches the current selection, so a response for a
//! superseded selection can never overwrite newer data.

use crate::region::{Level, Region, Village};
use crate::source::{RegionError, RegionSource};

/// Names a pending child fetch and the parent code its results belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub level: Level,
    pub parent: String,
}

/// Currently selected code per level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

/// Per-level in-flight flags, one per option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    pub provinces: bool,
    pub regencies: bool,
    pub districts: bool,
    pub villages: bool,
}

/// Owned state of the province → regency → district → village resolver.
#[derive(Debug, Default)]
pub struct RegionCascade {
    provinces: Vec<Region>,
    regencies: Vec<Region>,
    districts: Vec<Region>,
    villages: Vec<Village>,
    selection: Selection,
    loading: Loading,
    kode_pos: Option<String>,
    postal_locked: bool,
}

impl RegionCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provinces(&self) -> &[Region] {
        &self.provinces
    }

    pub fn regencies(&self) -> &[Region] {
        &self.regencies
    }

    pub fn districts(&self) -> &[Region] {
        &self.districts
    }

    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn loading(&self) -> Loading {
        self.loading
    }

    /// Auto-filled postal code, if the selected village carries one.
    pub fn kode_pos(&self) -> Option<&str> {
        self.kode_pos.as_deref()
    }

    /// True while the postal code input should be read-only.
    pub fn postal_locked(&self) -> bool {
        self.postal_locked
    }

    /// Start loading the top-level province list.
    pub fn begin_provinces(&mut self) -> FetchTicket {
        self.loading.provinces = true;
        FetchTicket {
            level: Level::Province,
            parent: String::new(),
        }
    }

    /// Select a province: clears regency, district, village, and the postal
    /// code, and requests the regency list for the new code.
    pub fn select_province(&mut self, code: impl Into<String>) -> FetchTicket {
        let code = code.into();
        self.selection.province = Some(code.clone());
        self.clear_downstream(Level::Province);
        self.loading.regencies = true;
        FetchTicket {
            level: Level::Regency,
            parent: code,
        }
    }

    pub fn select_regency(&mut self, code: impl Into<String>) -> FetchTicket {
        let code = code.into();
        self.selection.regency = Some(code.clone());
        self.clear_downstream(Level::Regency);
        self.loading.districts = true;
        FetchTicket {
            level: Level::District,
            parent: code,
        }
    }

    pub fn select_district(&mut self, code: impl Into<String>) -> FetchTicket {
        let code = code.into();
        self.selection.district = Some(code.clone());
        self.clear_downstream(Level::District);
        self.loading.villages = true;
        FetchTicket {
            level: Level::Village,
            parent: code,
        }
    }

    /// Select a village from the loaded list. A village with a postal code
    /// fills and locks `kode_pos`; one without clears and unlocks it.
    pub fn select_village(&mut self, code: impl Into<String>) {
        let code = code.into();
        let postal = self
            .villages
            .iter()
            .find(|village| village.code == code)
            .and_then(|village| village.postal_code.clone());
        self.selection.village = Some(code);
        match postal {
            Some(kode_pos) => {
                self.kode_pos = Some(kode_pos);
                self.postal_locked = true;
            }
            None => {
                self.kode_pos = None;
                self.postal_locked = false;
            }
        }
    }

    pub fn apply_provinces(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Region>, RegionError>,
    ) -> bool {
        if ticket.level != Level::Province {
            return false;
        }
        self.loading.provinces = false;
        self.provinces = unwrap_or_empty(ticket, outcome);
        true
    }

    pub fn apply_regencies(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Region>, RegionError>,
    ) -> bool {
        if !self.ticket_current(ticket, Level::Regency) {
            return false;
        }
        self.loading.regencies = false;
        self.regencies = unwrap_or_empty(ticket, outcome);
        true
    }

    pub fn apply_districts(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Region>, RegionError>,
    ) -> bool {
        if !self.ticket_current(ticket, Level::District) {
            return false;
        }
        self.loading.districts = false;
        self.districts = unwrap_or_empty(ticket, outcome);
        true
    }

    pub fn apply_villages(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Village>, RegionError>,
    ) -> bool {
        if !self.ticket_current(ticket, Level::Village) {
            return false;
        }
        self.loading.villages = false;
        self.villages = unwrap_or_empty(ticket, outcome);
        true
    }

    /// Load the province list through `source` in one call.
    pub async fn load_provinces(&mut self, source: &dyn RegionSource) {
        let ticket = self.begin_provinces();
        let outcome = source.provinces().await;
        self.apply_provinces(&ticket, outcome);
    }

    /// Select a province and resolve its regencies in one call, for callers
    /// running a single flow.
    pub async fn choose_province(&mut self, source: &dyn RegionSource, code: impl Into<String>) {
        let ticket = self.select_province(code);
        let outcome = source.regencies(&ticket.parent).await;
        self.apply_regencies(&ticket, outcome);
    }

    pub async fn choose_regency(&mut self, source: &dyn RegionSource, code: impl Into<String>) {
        let ticket = self.select_regency(code);
        let outcome = source.districts(&ticket.parent).await;
        self.apply_districts(&ticket, outcome);
    }

    pub async fn choose_district(&mut self, source: &dyn RegionSource, code: impl Into<String>) {
        let ticket = self.select_district(code);
        let outcome = source.villages(&ticket.parent).await;
        self.apply_villages(&ticket, outcome);
    }

    fn ticket_current(&self, ticket: &FetchTicket, level: Level) -> bool {
        let parent = match level {
            Level::Province => return ticket.level == Level::Province,
            Level::Regency => self.selection.province.as_deref(),
            Level::District => self.selection.regency.as_deref(),
            Level::Village => self.selection.district.as_deref(),
        };
        let current = ticket.level == level && parent == Some(ticket.parent.as_str());
        if !current {
            tracing::debug!(
                level = ticket.level.as_str(),
                parent = %ticket.parent,
                "discarding superseded region fetch"
            );
        }
        current
    }

    fn clear_downstream(&mut self, level: Level) {
        if level <= Level::Province {
            self.selection.regency = None;
            self.regencies.clear();
            self.loading.regencies = false;
        }
        if level <= Level::Regency {
            self.selection.district = None;
            self.districts.clear();
            self.loading.districts = false;
        }
        if level <= Level::District {
            self.selection.village = None;
            self.villages.clear();
            self.loading.villages = false;
        }
        self.kode_pos = None;
        self.postal_locked = false;
    }
}

fn unwrap_or_empty<T>(ticket: &FetchTicket, outcome: Result<Vec<T>, RegionError>) -> Vec<T> {
    match outcome {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(
                level = ticket.level.as_str(),
                parent = %ticket.parent,
                %error,
                "region fetch failed; treating the level as empty"
            );
            Vec::new()
        }
    }
}
