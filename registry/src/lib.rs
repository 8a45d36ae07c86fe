use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::access_log::AccessLogRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use anyhow::Result;
use kernel::repository::access_log::AccessLogRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::room::RoomRepository;
use kernel::repository::user::UserRepository;
use kernel::schedule::window::WindowPolicy;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    room_repository: Arc<dyn RoomRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    access_log_repository: Arc<dyn AccessLogRepository>,
    user_repository: Arc<dyn UserRepository>,
    window_policy: WindowPolicy,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Result<Self> {
        let window_policy = WindowPolicy::from_config(&app_config.scheduling)?;
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let access_log_repository = Arc::new(AccessLogRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        Ok(Self {
            health_check_repository,
            room_repository,
            reservation_repository,
            access_log_repository,
            user_repository,
            window_policy,
        })
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn access_log_repository(&self) -> Arc<dyn AccessLogRepository> {
        self.access_log_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn window_policy(&self) -> WindowPolicy {
        self.window_policy
    }
}
