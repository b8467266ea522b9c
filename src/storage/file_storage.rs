use crate::{
    domain::Board,
    drag::{DragConfig, MoveRequest},
    error::{BoardError, Result},
    storage::{apply_move, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::RwLock};

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
    // readers share, read-modify-write of board.json is exclusive
    board_lock: RwLock<()>,
}

impl FileStorage {
    const DRAGBOARD_DIR: &'static str = ".dragboard";
    const BOARD_FILE: &'static str = "board.json";
    const BOARD_TMP_FILE: &'static str = "board.json.tmp";
    const CONFIG_FILE: &'static str = "config.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::DRAGBOARD_DIR),
            board_lock: RwLock::new(()),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn config_file(&self) -> PathBuf {
        self.root_path.join(Self::CONFIG_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    async fn write_board(&self, board: &Board) -> Result<()> {
        board.validate()?;
        self.ensure_directory_exists(&self.root_path).await?;

        // write aside then rename so board.json is never seen half-written
        let json = serde_json::to_string_pretty(board)?;
        let tmp_file = self.root_path.join(Self::BOARD_TMP_FILE);
        fs::write(&tmp_file, json).await?;
        fs::rename(&tmp_file, self.board_file()).await?;
        Ok(())
    }

    async fn read_board(&self) -> Result<Board> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(BoardError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let mut board: Board = serde_json::from_str(&contents)?;
        board.normalize();
        board.validate()?;

        Ok(board)
    }

    /// Loads the drag configuration, falling back to defaults when absent
    pub async fn load_config(&self) -> Result<DragConfig> {
        let config_file = self.config_file();

        if !config_file.exists() {
            return Ok(DragConfig::default());
        }

        let contents = fs::read_to_string(&config_file).await?;
        let config: DragConfig = serde_json::from_str(&contents)
            .map_err(|e| BoardError::ConfigError(format!("{}: {}", config_file.display(), e)))?;
        config.validate()?;

        Ok(config)
    }

    /// Saves the drag configuration
    pub async fn save_config(&self, config: &DragConfig) -> Result<()> {
        config.validate()?;
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(config)?;
        fs::write(self.config_file(), json).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        // Create default board if it doesn't exist
        if !self.board_file().exists() {
            self.save_board(&Board::default()).await?;
        }

        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let _guard = self.board_lock.write().await;
        self.write_board(board).await
    }

    async fn load_board(&self) -> Result<Board> {
        let _guard = self.board_lock.read().await;
        self.read_board().await
    }

    async fn move_card(&self, request: &MoveRequest) -> Result<Board> {
        let _guard = self.board_lock.write().await;

        let board = self.read_board().await?;
        let moved = apply_move(&board, request)?;
        self.write_board(&moved).await?;

        Ok(moved)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}
