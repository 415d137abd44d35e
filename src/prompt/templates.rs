// Prompt templates

use super::{CULTIVATION_GAIN, hunt_year_range};

/// Game-master persona sent with every request
pub const SYSTEM_INSTRUCTION: &str = "Bạn là người dẫn truyện (Game Master) của một trò chơi nhập vai \
lấy bối cảnh thế giới Đấu La Đại Lục 3: Long Vương Truyền Thuyết. \
Hãy tạo sự kiện, mô tả và kết quả ngắn gọn, giàu hình ảnh, bằng tiếng Việt, dựa trên hành động của người chơi. \
Luôn dùng đúng thuật ngữ của truyện: Hồn Sư, Võ Hồn, Hồn Lực, Hồn Hoàn, Hồn Linh, Minh Tưởng, Hồn Thú. \
Chỉ trả về một đối tượng JSON hợp lệ, không kèm markdown hay bất kỳ lời giải thích nào bên ngoài.";

pub fn cultivation(name: &str, power: u32) -> String {
    let (min, max) = CULTIVATION_GAIN;
    format!(
        "Người chơi '{name}' (Hồn Lực: {power}) đang Minh Tưởng tu luyện.\n\
         Hãy mô tả ngắn gọn buổi tu luyện và quyết định lượng Hồn Lực nhận được \
         (một số nguyên từ {min} đến {max}).\n\
         Trả lời duy nhất bằng JSON theo schema: {{ \"description\": string, \"powerGained\": number }}"
    )
}

pub fn hunt(name: &str, power: u32, ring_slot: u32) -> String {
    let (min_year, max_year) = hunt_year_range(ring_slot);
    format!(
        "Người chơi '{name}' (Hồn Lực: {power}) tiến vào rừng săn Hồn Thú để lấy Hồn Hoàn thứ {ring_slot}.\n\
         Hồn Thú có niên hạn từ {min_year} đến {max_year} năm.\n\
         Mô tả trận chiến và kết quả (thành công hoặc thất bại). \
         Nếu thành công, cung cấp niên hạn và năng lực của Hồn Hoàn mới.\n\
         Trả lời duy nhất bằng JSON theo schema: \
         {{ \"success\": boolean, \"description\": string, \"ring\": {{ \"year\": number, \"ability\": string }} | null }}"
    )
}

pub fn spirit_soul(name: &str) -> String {
    format!(
        "Dựa vào tên nhân vật '{name}', hãy sáng tạo một Võ Hồn hoàn toàn mới trong thế giới Đấu La Đại Lục.\n\
         Không dùng lại các Võ Hồn đã có trong truyện (ví dụ Lam Ngân Thảo, Hạo Thiên Chùy, U Minh Linh Miêu, Tà Mâu Bạch Hổ).\n\
         Đặt một cái tên thật kêu và viết mô tả ngắn (15-25 từ) về năng lực cốt lõi.\n\
         Trả lời duy nhất bằng JSON theo schema: {{ \"name\": string, \"description\": string }}"
    )
}

pub fn background(name: &str, spirit_soul: &str) -> String {
    format!(
        "Dựa vào tên nhân vật '{name}' và Võ Hồn '{spirit_soul}', hãy tạo một xuất thân ngẫu nhiên, \
         sáng tạo và ngắn gọn (20-30 từ) trong thế giới Đấu La Đại Lục.\n\
         Xuất thân chỉ để nhập vai, không mang lại lợi thế.\n\
         Trả lời duy nhất bằng JSON theo schema: {{ \"background\": string }}"
    )
}
