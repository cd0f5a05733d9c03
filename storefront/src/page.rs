//! Landing page view
//!
//! Composes the status evaluator, link builder and address formatter into
//! a plain-text rendering of the page. [`LandingView`] owns the live status
//! for as long as the page is mounted.

use std::sync::Arc;
use std::time::Duration;

use shared::BusinessConfig;
use tokio::sync::watch;

use crate::address;
use crate::core::BackgroundTasks;
use crate::links;
use crate::schedule::{self, StoreStatus};
use crate::status::{Clock, StatusHandle};

/// Stateless renderer for one business
pub struct LandingPage<'a> {
    business: &'a BusinessConfig,
}

impl<'a> LandingPage<'a> {
    pub fn new(business: &'a BusinessConfig) -> Self {
        Self { business }
    }

    /// Header line with the live badge
    pub fn status_line(&self, status: &StoreStatus) -> String {
        format!("[{}] Hoje: {}", status.badge(), status.hours_label)
    }

    /// Link for the floating "Pedir agora" button
    pub fn order_now_link(&self) -> String {
        links::message_link(&self.business.messaging_target, "Olá! Quero fazer um pedido.")
    }

    /// Link asking whether the store delivers to the given address
    pub fn delivery_inquiry_link(&self, customer_address: &str) -> String {
        links::inquiry_link(&self.business.messaging_target, customer_address)
    }

    /// Full page as text
    pub fn render(&self, status: &StoreStatus) -> String {
        let b = self.business;
        let mut page = PageBuilder::new();

        page.line(format!("=== {} ===", b.name));
        if let Some(tagline) = &b.tagline {
            page.line(tagline);
        }
        page.line(self.status_line(status)).line(format!(
            "Entrega: {} | Pedido mínimo: {} | Taxa de entrega: {}",
            b.delivery.time_range_label(),
            b.delivery.min_order_label,
            b.delivery.delivery_fee_label
        ));
        page.line(format!("Pedir agora: {}", self.order_now_link()));

        if !b.menu.is_empty() {
            page.blank().line("Cardápio");
            for section in b.menu.sections.iter().filter(|s| !s.items.is_empty()) {
                page.line(format!("-- {} --", section.name));
                for item in &section.items {
                    match &item.price_label {
                        Some(price) => page.line(format!("  {} - R$ {}", item.name, price)),
                        None => page.line(format!("  {}", item.name)),
                    };
                    if let Some(description) = &item.description {
                        page.line(format!("    {description}"));
                    }
                    page.line(format!(
                        "    Pedir: {}",
                        links::menu_item_link(&b.messaging_target, item)
                    ));
                }
            }
        }

        page.blank().line("Horários");
        for (day, label) in schedule::weekly_hours(&b.schedule) {
            page.line(format!("  {day}: {label}"));
        }

        page.blank().line("Endereço");
        for line in address::display_lines(&b.address) {
            page.line(format!("  {line}"));
        }
        let (lat, lng) = address::coordinates(&b.address);
        page.line(format!("  Mapa: {}", address::map_search_url(&b.address)))
            .line(format!("  Coordenadas: {lat}, {lng}"));

        page.blank().line(format!(
            "Entregamos no seu endereço? {}",
            self.delivery_inquiry_link(&address::single_line(&b.address))
        ));

        page.build()
    }
}

/// Line-oriented text accumulator for the page
struct PageBuilder {
    buf: String,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(2048),
        }
    }

    /// Write text followed by a newline
    fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    fn build(self) -> String {
        self.buf
    }
}

/// A mounted landing page with its own status refresher
///
/// Unmounting (or dropping) the view stops the refresh timer.
pub struct LandingView {
    business: Arc<BusinessConfig>,
    status: StatusHandle,
}

impl LandingView {
    pub fn mount<C: Clock>(
        business: Arc<BusinessConfig>,
        clock: C,
        refresh_interval: Duration,
        tasks: &mut BackgroundTasks,
    ) -> Self {
        let status = StatusHandle::spawn(business.clone(), clock, refresh_interval, tasks);
        tracing::debug!(name = %business.name, "Landing view mounted");
        Self { business, status }
    }

    pub fn status(&self) -> StoreStatus {
        self.status.current()
    }

    /// Receiver notified on every status refresh
    pub fn subscribe(&self) -> watch::Receiver<StoreStatus> {
        self.status.subscribe()
    }

    pub fn render(&self) -> String {
        LandingPage::new(&self.business).render(&self.status())
    }

    pub fn is_mounted(&self) -> bool {
        self.status.is_running()
    }

    pub fn unmount(self) {
        self.status.stop();
        tracing::debug!(name = %self.business.name, "Landing view unmounted");
    }
}
