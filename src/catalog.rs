// ABOUTME: Hard-coded shop, service and time-slot catalogs with price/duration math

/// A bookable barber shop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shop {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub rating: f32,
    pub distance: &'static str,
}

/// A bookable service with a display duration like "30 min".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub duration: &'static str,
}

impl Service {
    /// Numeric minutes parsed from the duration label's leading digits.
    pub fn duration_minutes(&self) -> u32 {
        self.duration
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

/// One appointment slot in the fixed daily grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: &'static str,
    pub label: &'static str,
    pub available: bool,
}

pub const SHOPS: &[Shop] = &[
    Shop {
        id: "1",
        name: "Style Master Barber",
        address: "123 Main Street, Downtown",
        phone: "+1 234 567 8900",
        rating: 4.8,
        distance: "0.5 km",
    },
    Shop {
        id: "2",
        name: "Classic Cuts Studio",
        address: "456 Oak Avenue, City Center",
        phone: "+1 234 567 8901",
        rating: 4.6,
        distance: "1.2 km",
    },
    Shop {
        id: "3",
        name: "Elite Grooming Lounge",
        address: "789 Pine Road, Westside",
        phone: "+1 234 567 8902",
        rating: 4.9,
        distance: "2.1 km",
    },
    Shop {
        id: "4",
        name: "Premium Barber Shop",
        address: "321 Elm Street, Eastside",
        phone: "+1 234 567 8903",
        rating: 4.7,
        distance: "1.8 km",
    },
];

pub const SERVICES: &[Service] = &[
    Service { id: "1", name: "Haircut", price: 450, duration: "30 min" },
    Service { id: "2", name: "Beard Trim", price: 200, duration: "15 min" },
    Service { id: "3", name: "Haircut + Beard", price: 600, duration: "45 min" },
    Service { id: "4", name: "Hair Coloring", price: 800, duration: "60 min" },
    Service { id: "5", name: "Facial", price: 500, duration: "45 min" },
    Service { id: "6", name: "Head Massage", price: 300, duration: "20 min" },
];

// Availability is static mock data; slots 3 and 7 render as booked.
pub const TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot { id: "1", label: "09:00 AM", available: true },
    TimeSlot { id: "2", label: "10:00 AM", available: true },
    TimeSlot { id: "3", label: "11:00 AM", available: false },
    TimeSlot { id: "4", label: "12:00 PM", available: true },
    TimeSlot { id: "5", label: "01:00 PM", available: true },
    TimeSlot { id: "6", label: "02:00 PM", available: true },
    TimeSlot { id: "7", label: "03:00 PM", available: false },
    TimeSlot { id: "8", label: "04:00 PM", available: true },
    TimeSlot { id: "9", label: "05:00 PM", available: true },
    TimeSlot { id: "10", label: "06:00 PM", available: true },
];

pub fn shop_by_id(id: &str) -> Option<&'static Shop> {
    SHOPS.iter().find(|s| s.id == id)
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn slot_by_id(id: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|s| s.id == id)
}

/// Services resolved by filtering the catalog against the given ids.
/// Catalog order wins, and unknown or repeated ids contribute nothing extra.
pub fn resolve_services<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|service| ids.iter().any(|id| id.as_ref() == service.id))
        .collect()
}

pub fn total_price<S: AsRef<str>>(ids: &[S]) -> u32 {
    resolve_services(ids).iter().map(|s| s.price).sum()
}

pub fn total_duration_minutes<S: AsRef<str>>(ids: &[S]) -> u32 {
    resolve_services(ids).iter().map(|s| s.duration_minutes()).sum()
}
