//! Display surface that records every call

use std::collections::HashMap;

use learnboard_core::charts::ChartOutput;
use learnboard_core::{ChartRegion, DisplaySurface, ListSlot, Slot, TooltipBinding, View};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    View(View),
    Busy(bool),
    LoginError(String),
    ClearLoginError,
    Alert(String),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub slots: HashMap<Slot, String>,
    pub lists: HashMap<ListSlot, Vec<String>>,
    pub charts: HashMap<ChartRegion, ChartOutput>,
    pub tooltips: HashMap<ChartRegion, Vec<TooltipBinding>>,
}

impl RecordingSurface {
    pub fn current_view(&self) -> Option<View> {
        self.events.iter().rev().find_map(|event| match event {
            SurfaceEvent::View(view) => Some(*view),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn busy_transitions(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Busy(busy) => Some(*busy),
                _ => None,
            })
            .collect()
    }

    pub fn login_error(&self) -> Option<&str> {
        let mut current = None;
        for event in &self.events {
            match event {
                SurfaceEvent::LoginError(message) => current = Some(message.as_str()),
                SurfaceEvent::ClearLoginError => current = None,
                _ => {}
            }
        }
        current
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_view(&mut self, view: View) {
        self.events.push(SurfaceEvent::View(view));
    }

    fn set_login_busy(&mut self, busy: bool) {
        self.events.push(SurfaceEvent::Busy(busy));
    }

    fn show_login_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::LoginError(message.into()));
    }

    fn clear_login_error(&mut self) {
        self.events.push(SurfaceEvent::ClearLoginError);
    }

    fn alert(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Alert(message.into()));
    }

    fn set_slot(&mut self, slot: Slot, value: &str) {
        self.slots.insert(slot, value.into());
    }

    fn set_list(&mut self, slot: ListSlot, items: &[String]) {
        self.lists.insert(slot, items.to_vec());
    }

    fn set_chart(&mut self, region: ChartRegion, chart: &ChartOutput) {
        self.charts.insert(region, chart.clone());
    }

    fn bind_tooltips(&mut self, region: ChartRegion, bindings: &[TooltipBinding]) {
        self.tooltips.insert(region, bindings.to_vec());
    }
}
