use crate::dto::common_dto::ApiResponse;
use crate::dto::vendor_dto::{CreateVendorRequest, UpdateVendorRequest, VendorResponse};
use crate::models::vendor::Vendor;
use crate::repositories::vendor_repository::VendorRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VendorController {
    repository: VendorRepository,
}

impl VendorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VendorRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVendorRequest,
    ) -> Result<ApiResponse<VendorResponse>, AppError> {
        request.validate()?;

        let now = Utc::now();
        let vendor = Vendor {
            id: Uuid::new_v4(),
            name: request.name,
            contact_person: request.contact_person,
            phone: request.phone,
            email: request.email,
            rating: request.rating,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(&vendor).await?;

        // Un proveedor recién creado no tiene trabajos todavía
        Ok(ApiResponse::success_with_message(
            VendorResponse::from_new_vendor(created),
            "Proveedor creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VendorResponse, AppError> {
        let vendor = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        Ok(vendor.into())
    }

    pub async fn list(&self) -> Result<Vec<VendorResponse>, AppError> {
        let vendors = self.repository.find_all().await?;
        Ok(vendors.into_iter().map(VendorResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVendorRequest,
    ) -> Result<ApiResponse<VendorResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        let vendor = Vendor {
            id: current.id,
            name: request.name.unwrap_or(current.name),
            contact_person: request.contact_person.or(current.contact_person),
            phone: request.phone.or(current.phone),
            email: request.email.or(current.email),
            rating: request.rating.or(current.rating),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        self.repository.update(&vendor).await?;

        // Releer con el agregado work_count para la respuesta
        let updated = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Proveedor actualizado exitosamente".to_string(),
        ))
    }

    /// Eliminar un proveedor. Los registros de mantenimiento que lo
    /// referencian no se tocan: conservan el vendor_id huérfano.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
