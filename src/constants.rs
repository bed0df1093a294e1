/// 编码时在网格左侧与底部额外留出的边框宽度 (单元格数)。
/// 解码端依赖同一个值推导螺旋起点。
pub const BORDER: usize = 1;

/// 每个比特在输出图像中占据的正方形边长 (像素)。
pub const DEFAULT_SCALE: u32 = 10;

/// 比特值 0 (以及背景) 的打包颜色值。
pub const DEFAULT_BG_COLOR: u32 = 0x00;

/// 比特值 1 的打包颜色值。
pub const DEFAULT_BITS_COLOR: u32 = 0xFF;

/// 螺旋上相邻两个比特之间的距离。
pub const DEFAULT_STEP_SIZE: usize = 1;

/// GIF 动画中每帧旋转的比特数。
pub const DEFAULT_ROTATION_STEP: usize = 1;

/// GIF 每帧持续时间 (毫秒)。
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// GIF 循环次数，0 表示无限循环。
pub const DEFAULT_LOOPS: u16 = 0;

/// 未指定输出路径时使用的静态图像文件名。
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.bmp";

/// 动画文件名在静态图像文件名之后追加的后缀。
pub const GIF_SUFFIX: &str = ".gif";
