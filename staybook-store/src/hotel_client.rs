use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use staybook_core::directory::HotelDirectory;

/// HTTP client for the hotel service. No retry, no cache; failures are hard
/// errors for the caller to surface.
pub struct HotelApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HotelApiClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[derive(Debug, Deserialize)]
struct RoomEntry {
    id: Uuid,
    price_per_night: f64,
}

#[derive(Debug, Deserialize)]
struct RoomsResponse {
    rooms: Vec<RoomEntry>,
}

#[derive(Debug, Deserialize)]
struct HotelEntry {
    owner_id: Uuid,
}

#[async_trait]
impl HotelDirectory for HotelApiClient {
    async fn room_price(
        &self,
        hotel_id: Uuid,
        room_id: Uuid,
    ) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/hotels/{}/rooms", self.base_url, hotel_id);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(format!("hotel service returned status {}", response.status()).into());
        }

        let body: RoomsResponse = response.json().await?;
        body.rooms
            .iter()
            .find(|room| room.id == room_id)
            .map(|room| room.price_per_night)
            .ok_or_else(|| format!("room {} not found in hotel {}", room_id, hotel_id).into())
    }

    async fn owner_id(
        &self,
        hotel_id: Uuid,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/hotels/{}", self.base_url, hotel_id);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(format!("hotel service returned status {}", response.status()).into());
        }

        let hotel: HotelEntry = response.json().await?;
        Ok(hotel.owner_id)
    }
}
